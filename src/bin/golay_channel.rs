use golay_codec::ecc::golay::{Decoded, GolayCode, Message, CODEWORD_BITS};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TRIALS: usize = 10_000;
const MAX_ERRORS: usize = 5;
const SEED: u64 = 2412;

#[derive(Debug, Default)]
struct Tally {
    corrected: usize,
    miscorrected: usize,
    uncorrectable: usize,
}

fn main() {
    let code = GolayCode::new();

    println!("{}", code);
    println!("P:\n{}", code.structure());
    println!("G:\n{}", code.generator());
    println!("H:\n{}", code.parity_check());
    println!();

    // Binary symmetric channel with a fixed number of flips per word
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    println!(
        "{:>6} {:>10} {:>13} {:>14}",
        "errors", "corrected", "miscorrected", "uncorrectable"
    );

    for weight in 0..=MAX_ERRORS {
        let mut tally = Tally::default();

        for _ in 0..TRIALS {
            let message = Message::from_bits(rng.gen());
            let mut received = code.encode(&message);
            for pos in rand::seq::index::sample(&mut rng, CODEWORD_BITS, weight).into_vec() {
                received.flip(pos);
            }

            match code.decode(&received) {
                Decoded::Corrected(c) if c.message == message => tally.corrected += 1,
                Decoded::Corrected(_) => tally.miscorrected += 1,
                Decoded::Uncorrectable { .. } => tally.uncorrectable += 1,
            }
        }

        println!(
            "{:>6} {:>10} {:>13} {:>14}",
            weight, tally.corrected, tally.miscorrected, tally.uncorrectable
        );
    }
}
