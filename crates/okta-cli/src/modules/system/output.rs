use std::io::Write;

use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub(crate) fn print_message(out: &mut dyn Write, message: &str) -> anyhow::Result<()> {
    writeln!(out, "{message}")?;
    Ok(())
}
