//! Export command - snapshot filtered rows to a timestamped report

use anyhow::Result;

use super::{FilterArgs, get_context};
use crate::output;

pub fn run(filters: &FilterArgs) -> Result<()> {
    let ctx = get_context()?;
    let expenses = ctx.store.load_all()?;
    let matching = filters.to_filter()?.apply(&expenses);

    if matching.is_empty() {
        println!("Nothing to export.");
        return Ok(());
    }

    let path = ctx.exporter.export(&matching)?;
    output::success(&format!(
        "Exported {} rows to {}",
        matching.len(),
        path.display()
    ));
    Ok(())
}
