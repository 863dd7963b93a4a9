use std::path::Path;

use miette::Result;

use deplens_ops::ops_summary;

pub fn exec(report: &Path) -> Result<()> {
    ops_summary::summary(report)
}
