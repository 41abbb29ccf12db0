//! `encrypt`, `decrypt` and `inspect` handlers.

use zkvault_core::EncryptedEnvelope;

use crate::app::{open_session, AppContext};
use crate::cli::{DecryptArgs, EncryptArgs, InspectArgs};
use crate::errors::CliError;
use crate::helpers::{read_envelope, read_plaintext};

pub fn handle_encrypt(ctx: &AppContext<'_>, args: &EncryptArgs) -> anyhow::Result<()> {
    let plaintext = read_plaintext(args.text.clone(), args.key.no_input)?;
    let mut session = open_session(ctx, &args.key)?;

    let envelope = session.encrypt_envelope(&plaintext).map_err(CliError::from)?;
    session.clear();

    let rendered = if args.pretty || ctx.config()?.output.pretty {
        envelope.to_json_pretty()
    } else {
        envelope.to_json()
    };
    println!("{}", rendered.map_err(CliError::from)?);
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext<'_>, args: &DecryptArgs) -> anyhow::Result<()> {
    let envelope = read_envelope(args.envelope.as_deref())?;
    let mut session = open_session(ctx, &args.key)?;

    let plaintext = session.decrypt(&envelope).map_err(CliError::from)?;
    session.clear();

    print!("{}", plaintext);
    Ok(())
}

pub fn handle_inspect(ctx: &AppContext<'_>, args: &InspectArgs) -> anyhow::Result<()> {
    let raw = read_envelope(args.envelope.as_deref())?;
    let shape = EncryptedEnvelope::from_json(&raw).and_then(|envelope| envelope.validate_shape());
    let (iv_len, ciphertext_len) = shape.map_err(|_| {
        CliError::invalid_input(
            "Malformed envelope: expected {\"iv\", \"ciphertext\"} with base64 values",
        )
    })?;

    if ctx.quiet() {
        println!("ok");
    } else {
        println!("status=ok");
        println!("iv_bytes={}", iv_len);
        println!("ciphertext_bytes={}", ciphertext_len);
        println!("plaintext_bytes={}", ciphertext_len - zkvault_core::vault::TAG_LENGTH);
    }
    Ok(())
}
