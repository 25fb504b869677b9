//! The `routes` and `status-codes` subcommands: static tables, no network.

use docpipe_api::{routes, HTTP_STATUS_MESSAGES};

use crate::output::{print_routes, print_status_codes, OutputFormat};

pub fn routes(format: &OutputFormat) {
    if let OutputFormat::Table = format {
        println!("/ -> {}", routes::ROOT_REDIRECT);
    }
    print_routes(routes::routes(), format);
}

pub fn status_codes(format: &OutputFormat) {
    print_status_codes(&HTTP_STATUS_MESSAGES, format);
}
