use lagrange::interpolate_with_degree;
use math::PrimeField;
use rand::Rng;

const PRIME: u64 = 15485867;
const THRESHOLD: usize = 3;
const PARTICIPANTS: u64 = 5;

fn deal_shares(secret: u64) -> Vec<(u64, u64)> {
    let field = PrimeField::new(PRIME).expect("prime modulus");
    let mut rng = rand::rng();

    let mut coefficients = vec![secret];
    coefficients.extend((1..THRESHOLD).map(|_| rng.random_range(0..PRIME)));

    (1..=PARTICIPANTS)
        .map(|x| {
            let y = coefficients
                .iter()
                .rev()
                .fold(0, |acc, &c| field.add(field.mul(acc, x), c));
            (x, y)
        })
        .collect()
}

fn main() {
    let secret = 123;
    let shares = deal_shares(secret);
    println!(
        "dealt {} shares of the secret over GF({PRIME}), threshold {THRESHOLD}",
        shares.len()
    );

    let quorum = &shares[shares.len() - THRESHOLD..];
    let recovered = interpolate_with_degree(quorum, PRIME, Some(THRESHOLD - 1))
        .expect("recovery from a full quorum should succeed");
    assert_eq!(recovered, secret, "recovered secret should match");

    println!(
        "recovered {recovered} from shares {:?}",
        quorum.iter().map(|&(x, _)| x).collect::<Vec<_>>()
    );
}
