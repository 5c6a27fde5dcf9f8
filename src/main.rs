//! Audit side-bearing consistency across the weights of a font family.

use spacing_audit::core;

fn main() {
    let cli_args = core::platform::get_cli_args();
    if let Err(error) = core::run_app(cli_args) {
        core::platform::handle_error(error);
    }
}
