use ck_koans::{Catalog, KoanCheck};

use crate::ui;

/// Check every koan's completed expression. Returns `false` if any fail.
pub fn run(catalog: &Catalog) -> bool {
    let checks = catalog.check_all();
    ui::validation_results(&checks);
    checks.iter().all(KoanCheck::passed)
}
