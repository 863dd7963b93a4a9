use std::path::Path;

use miette::Result;

use deplens_ops::ops_check;

pub fn exec(report: &Path) -> Result<()> {
    ops_check::check(report)
}
