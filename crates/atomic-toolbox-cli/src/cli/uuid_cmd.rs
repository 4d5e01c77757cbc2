//! `atomic-toolbox uuid`.

use crate::cli::output;
use anyhow::Result;
use atomic_toolbox::util::ids::{short_uuid, uuid};

pub fn run(short: bool) -> Result<()> {
    let id = if short {
        short_uuid().to_string()
    } else {
        uuid()
    };

    if output::is_json() {
        output::print_json(&serde_json::json!({ "uuid": id }));
    } else {
        println!("{id}");
    }
    Ok(())
}
