//! Command-line interface

use elgamal_crypto::codec::{decode_message, encode_message, number_to_text};
use elgamal_crypto::dlog::BabyStepGiantStep;
use elgamal_crypto::keypair::GroupParameters;
use elgamal_crypto::ring::to_exponent;
use elgamal_crypto::system::{Ciphertext, ElGamal, ciphertexts_from_json, ciphertexts_to_json};
use elgamal_crypto::ElGamalError;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use num_bigint::{BigInt, BigUint};

use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "elgamal")]
#[command(version = "0.1.0")]
#[command(about = "ElGamal over Z_p* with a baby-step giant-step attack")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decrypt ciphertexts and recover their ephemeral exponents, deriving the key if needed
    Attack {
        #[command(flatten)]
        group: GroupArgs,
        /// Private key a (recovered from beta when omitted)
        #[arg(allow_negative_numbers = true)]
        private_key: Option<BigInt>,
        /// JSON file with [{"y1": ..., "y2": ...}, ...]
        #[arg(long)]
        ciphertexts: PathBuf,
    },
    /// Encrypt a message of letters, printing the ciphertexts as JSON
    Encrypt {
        #[command(flatten)]
        group: GroupArgs,
        /// Message; non-letters are dropped, letters are grouped into trigrams
        #[arg(long)]
        text: String,
        /// Fixed ephemeral exponent (random in [3, p-1) when omitted)
        #[arg(long, allow_negative_numbers = true)]
        k: Option<BigInt>,
    },
    /// Decrypt ciphertexts with a known private key
    Decrypt {
        #[command(flatten)]
        group: GroupArgs,
        /// Private key a
        #[arg(allow_negative_numbers = true)]
        private_key: BigInt,
        /// JSON file with [{"y1": ..., "y2": ...}, ...]
        #[arg(long)]
        ciphertexts: PathBuf,
    },
    /// Solve alpha^x = target (mod p)
    Dlog {
        /// Prime modulus
        p: BigUint,
        /// Generator
        alpha: BigUint,
        /// Element whose logarithm is wanted
        target: BigUint,
        /// Order of alpha (defaults to p - 1)
        #[arg(long)]
        order: Option<BigUint>,
    },
}

#[derive(Args)]
pub struct GroupArgs {
    /// Prime modulus
    pub p: BigUint,
    /// Generator of the multiplicative group mod p
    pub alpha: BigUint,
    /// Public key beta = alpha^a mod p
    pub beta: BigUint,
}

impl GroupArgs {
    fn cryptosystem(self) -> Result<ElGamal, ElGamalError> {
        ElGamal::try_with(self.p, self.alpha, self.beta)
    }
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Attack {
            group,
            private_key,
            ciphertexts,
        } => attack(group, private_key, &ciphertexts),
        Command::Encrypt { group, text, k } => encrypt(group, &text, k),
        Command::Decrypt {
            group,
            private_key,
            ciphertexts,
        } => decrypt(group, private_key, &ciphertexts),
        Command::Dlog {
            p,
            alpha,
            target,
            order,
        } => dlog(p, alpha, target, order),
    }
}

fn attack(group: GroupArgs, private_key: Option<BigInt>, path: &Path) -> anyhow::Result<()> {
    let mut cryptosystem = group.cryptosystem()?;

    match private_key {
        Some(a) => cryptosystem.set_private_key(to_exponent(&a)?),
        None => {
            log::info!("Private key not given, trying discrete logarithm...");
            let a = cryptosystem
                .derive_private_key()
                .context("failed to recover the private key from beta")?;
            log::info!("Recovered private key a = {}", a);
        }
    }

    let ciphers = read_ciphertexts(path)?;
    for line in attack_lines(&cryptosystem, &ciphers)? {
        println!("{}", line);
    }

    Ok(())
}

/// Renders one `(plaintext,k)` line per ciphertext.
///
/// `k` is `-` when `y1` is not a power of `alpha`.
fn attack_lines(
    cryptosystem: &ElGamal,
    ciphers: &[Ciphertext],
) -> Result<Vec<String>, ElGamalError> {
    let solver = BabyStepGiantStep::try_with(cryptosystem.params())?;
    let y1s: Vec<BigUint> = ciphers.iter().map(|cipher| cipher.y1.clone()).collect();
    let ephemerals = solver.solve_many(&y1s);

    let mut lines = Vec::with_capacity(ciphers.len());
    for (cipher, ephemeral) in ciphers.iter().zip(ephemerals) {
        let plaintext = cryptosystem.decrypt(cipher)?;
        let k = match ephemeral {
            Ok(k) => k.to_string(),
            Err(ElGamalError::DiscreteLogNotFound(reason)) => {
                log::warn!("no ephemeral exponent: {}", reason);
                "-".to_string()
            }
            Err(e) => return Err(e),
        };

        lines.push(format!("({},{})", number_to_text(&plaintext), k));
    }

    Ok(lines)
}

fn encrypt(group: GroupArgs, text: &str, k: Option<BigInt>) -> anyhow::Result<()> {
    let cryptosystem = group.cryptosystem()?;
    let k = k.as_ref().map(to_exponent).transpose()?;

    let blocks = encode_message(text)?;
    log::info!("Encrypting {} trigram blocks", blocks.len());

    let ciphers = blocks
        .iter()
        .map(|block| cryptosystem.encrypt(block, k.as_ref()))
        .collect::<Result<Vec<Ciphertext>, _>>()?;

    println!("{}", ciphertexts_to_json(&ciphers)?);

    Ok(())
}

fn decrypt(group: GroupArgs, private_key: BigInt, path: &Path) -> anyhow::Result<()> {
    let mut cryptosystem = group.cryptosystem()?;
    cryptosystem.set_private_key(to_exponent(&private_key)?);

    if !cryptosystem.verify_private_key()? {
        log::warn!("alpha^a does not match beta, output will be garbage");
    }

    let ciphers = read_ciphertexts(path)?;
    let plaintext = ciphers
        .iter()
        .map(|cipher| cryptosystem.decrypt(cipher))
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", decode_message(&plaintext));

    Ok(())
}

fn dlog(p: BigUint, alpha: BigUint, target: BigUint, order: Option<BigUint>) -> anyhow::Result<()> {
    let mut params = GroupParameters::try_with(p, alpha.clone(), alpha)?;
    if let Some(order) = order {
        params = params.with_order(order)?;
    }

    let solver = BabyStepGiantStep::try_with(&params)?;
    log::info!(
        "Solving mod {} with {} baby steps",
        solver.params().p(),
        solver.step_count()
    );

    let x = solver.solve(&target)?;
    println!("{}", x);

    Ok(())
}

fn read_ciphertexts(path: &Path) -> anyhow::Result<Vec<Ciphertext>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let ciphers = ciphertexts_from_json(&data)
        .with_context(|| format!("failed to parse ciphertexts in {}", path.display()))?;

    log::info!("Loaded {} ciphertexts from {}", ciphers.len(), path.display());

    Ok(ciphers)
}
