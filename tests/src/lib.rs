#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use lagrange::{interpolate, interpolate_with_degree};
    use math::PrimeField;
    use rand::Rng;

    const PRIME: u64 = 15485867;

    fn random_coefficients(degree: usize) -> Vec<u64> {
        let mut rng = rand::rng();
        (0..=degree).map(|_| rng.random_range(0..PRIME)).collect()
    }

    fn evaluate(field: &PrimeField, coefficients: &[u64], x: u64) -> u64 {
        coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| field.add(field.mul(acc, x), c))
    }

    fn deal(coefficients: &[u64], participants: u64) -> Vec<(u64, u64)> {
        let field = PrimeField::new(PRIME).expect("prime modulus");
        (1..=participants)
            .map(|x| (x, evaluate(&field, coefficients, x)))
            .collect()
    }

    #[test]
    fn test_complete_recovery_workflow() {
        // Set up test fixtures
        let threshold = 3;
        let participants = 5;

        // 1. Deal: sample a secret polynomial, one share per participant
        let coefficients = random_coefficients(threshold - 1);
        let secret = coefficients[0];
        let shares = deal(&coefficients, participants as u64);
        assert_eq!(shares.len(), participants);

        // 2. Recovery from every share
        let recovered =
            interpolate(shares.clone(), PRIME).expect("recovery from all shares");
        assert_eq!(recovered, secret);

        // 3. Recovery from exactly threshold shares
        let recovered = interpolate(shares[..threshold].to_vec(), PRIME)
            .expect("recovery from a quorum");
        assert_eq!(recovered, secret);

        // 4. Surplus shares with the degree pinned instead of discarded
        let recovered =
            interpolate_with_degree(shares, PRIME, Some(threshold - 1))
                .expect("degree-bounded recovery");
        assert_eq!(recovered, secret);
    }

    #[test]
    fn test_all_input_shapes_agree() {
        let coefficients = random_coefficients(3);
        let secret = coefficients[0];
        let shares = deal(&coefficients, 4);

        let as_mapping: BTreeMap<u64, u64> = shares.iter().copied().collect();
        let as_set: BTreeSet<(u64, u64)> = shares.iter().copied().collect();
        let as_values: Vec<u64> = shares.iter().map(|&(_, y)| y).collect();

        let from_pairs = interpolate(shares, PRIME).expect("pairs");
        let from_mapping = interpolate(as_mapping, PRIME).expect("mapping");
        let from_set = interpolate(as_set, PRIME).expect("pair set");
        let from_values = interpolate(as_values, PRIME).expect("values");

        assert_eq!(from_pairs, secret);
        assert_eq!(from_mapping, secret);
        assert_eq!(from_set, secret);
        assert_eq!(from_values, secret);
    }

    #[test]
    fn test_consistency_across_quorums() {
        let threshold = 3;
        let coefficients = random_coefficients(threshold - 1);
        let secret = coefficients[0];
        let shares = deal(&coefficients, 5);

        // Any contiguous quorum of threshold shares recovers the secret.
        for start in 0..=shares.len() - threshold {
            let quorum = shares[start..start + threshold].to_vec();
            let recovered = interpolate(quorum, PRIME).expect("quorum recovery");
            assert_eq!(recovered, secret, "quorum starting at share {start}");
        }
    }
}
