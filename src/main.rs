use kiroku::{error, App, Result};

fn main() -> Result<()> {
    error::setup_panic_handler();

    println!("kiroku - Minimal terminal note-taking application");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let mut app = App::new()?;
    app.run()
}
