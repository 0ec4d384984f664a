use anyhow::Result;
use serde::Serialize;

/// Prints `value` as JSON when requested, otherwise runs `human`.
pub(crate) fn emit<T: Serialize + ?Sized>(json: bool, value: &T, human: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human();
    }
    Ok(())
}
