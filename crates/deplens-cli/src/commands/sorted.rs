use std::path::Path;

use miette::Result;

use deplens_ops::ops_sorted::{self, SortedOptions};

pub fn exec(report: &Path, format: &str) -> Result<()> {
    let format = deplens_ops::parse_format(format)?;
    ops_sorted::sorted(report, &SortedOptions { format })
}
