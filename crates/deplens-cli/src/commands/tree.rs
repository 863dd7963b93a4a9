use std::path::Path;

use miette::Result;

use deplens_ops::ops_tree::{self, TreeOptions};

pub fn exec(report: &Path, depth: Option<usize>, format: &str) -> Result<()> {
    let format = deplens_ops::parse_format(format)?;
    ops_tree::tree(report, &TreeOptions { depth, format })
}
