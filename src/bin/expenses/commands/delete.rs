//! Delete command - remove an entry by index, or the most recent one

use anyhow::{Result, bail};

use super::get_context;
use crate::output;

pub fn run(index: Option<usize>, last: bool) -> Result<()> {
    let ctx = get_context()?;

    let removed = match (index, last) {
        (Some(index), false) => ctx.store.remove_at(index)?,
        (None, true) => ctx.store.remove_last()?,
        _ => bail!("provide an index, or --last for the most recent entry"),
    };

    output::success(&format!(
        "Deleted: {} | {} | {} | {}",
        removed.date,
        output::format_money(&removed.amount),
        removed.category,
        removed.description
    ));
    Ok(())
}
