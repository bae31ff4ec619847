//! Hashes the words of a phrase with a toy LFSR and logs every result.
//!
//! Run once to see the tokens, then again with `WATCHWORD=<token>` to stop
//! inside the hash computation that follows the matching log line. With the
//! `tracing` feature, tokens are printed as `tracing` events instead.

use watchword::{Activation, Options, SuspendError};

const PHRASE: &str = "No shenanigans during office hours";

fn lfsr_hash(mut state: u32) -> u32 {
    if let Err(error) = watchword::brk(None, Options::default()) {
        eprintln!("{}", error);
    }

    let mut result = 0;
    for _ in 0..32 {
        let bit = (state ^ (state >> 2) ^ (state >> 3) ^ (state >> 5)) & 1;
        state = (state >> 1) | (bit << 15);
        result = (result << 1) | bit;
    }

    result
}

fn my_hash(word: &str) -> u32 {
    let state = word.chars().fold(0, |hash, letter| hash ^ letter as u32);

    lfsr_hash(state)
}

fn report(activation: &Activation<'_>) -> Result<(), SuspendError> {
    eprintln!("Suspended at {}, with state:", activation.painted());
    eprintln!("{:#?}", activation);

    Ok(())
}

#[cfg(feature = "tracing")]
fn setup_tracing() {
    if let Err(error) = watchword::init_tracing(watchword::tracing::TracingConfig::default()) {
        eprintln!("{}", error);
    }
}

#[cfg(not(feature = "tracing"))]
fn setup_tracing() {}

fn main() {
    setup_tracing();
    watchword::set_suspend_hook(report);

    for word in PHRASE.split_whitespace() {
        let hash = my_hash(word);

        watchword::log!(word, hash);
    }
}
