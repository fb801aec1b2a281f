use std::io;

use anyhow::Result;

use logbook::app::App;
use logbook::config::Config;
use logbook::logging;
use logbook::registry::LogRegistry;

fn main() -> Result<()> {
    let config = Config::load()?;

    // Initialize logging BEFORE any tracing calls
    logging::init_logging(&config)?;

    // The only registry for this process
    let mut registry = LogRegistry::new();

    let stdin = io::stdin();
    let mut app = App::new(&mut registry, stdin.lock(), io::stdout(), io::stderr());
    app.run()
}
