use codesmith::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "usage: codesmith <numeric|alphanumeric|hex|uuid|token|short-id|verification|confirmation|recovery|version> [length]";

#[cfg(target_arch = "wasm32")]
fn main() -> CodesmithResult<()> {
    Err(CodesmithError::from("no main for wasm builds"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> CodesmithResult<()> {
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, Layer};

    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();
    tracing::debug!("running codesmith {}", minimal_version());

    let output = run(&IdentifierGenerator::new(), std::env::args().skip(1))?;
    println!("{output}");

    Ok(())
}

/// Produces the requested code from the command line arguments, program name excluded.
#[cfg(not(target_arch = "wasm32"))]
fn run<E: EntropySource>(
    generator: &IdentifierGenerator<E>,
    args: impl IntoIterator<Item = String>,
) -> CodesmithResult<String> {
    let mut args = args.into_iter();

    let kind = args.next().ok_or_else(|| CodesmithError::from(USAGE))?;
    let length = args
        .next()
        .map(|raw| raw.parse::<usize>())
        .transpose()
        .map_err(|err| CodesmithError::from(format!("invalid length: {err}")))?;

    if args.next().is_some() {
        return Err(CodesmithError::from(USAGE));
    }

    let output = match (kind.as_str(), length) {
        ("numeric", length) => {
            generator.numeric_code(length.unwrap_or(DEFAULT_NUMERIC_LENGTH))?
        }
        ("alphanumeric", length) => {
            generator.alphanumeric_code(length.unwrap_or(DEFAULT_ALPHANUMERIC_LENGTH))?
        }
        ("hex", length) => generator.hex_code(length.unwrap_or(DEFAULT_HEX_LENGTH))?,
        ("token", length) => generator.token(length.unwrap_or(DEFAULT_TOKEN_LENGTH))?,
        ("short-id", length) => generator.short_id(length.unwrap_or(DEFAULT_SHORT_ID_LENGTH))?,
        ("uuid", None) => generator.uuid()?,
        ("verification", None) => generator.verification_code(),
        ("confirmation", None) => generator.confirmation_code(),
        ("recovery", None) => generator.recovery_code(),
        ("version", None) => full_version(),
        ("uuid" | "verification" | "confirmation" | "recovery" | "version", Some(_)) => {
            return Err(CodesmithError::from(format!("{kind} doesn't take a length")));
        }
        _ => return Err(CodesmithError::from(USAGE)),
    };

    Ok(output)
}
