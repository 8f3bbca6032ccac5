//! Startup banner demo.
//!
//! Registers a few splashes the way a service would during boot, then
//! writes one at random to stdout. Run it a few times to see the rotation.
//!
//! Run with: cargo run --example startup
//!
//! Set RUST_LOG=termsplash=debug to log which splash was selected.

use termsplash::{SplashConfig, SplashScreen};

const GATE: &str = r"+--------------------------------------+
|           ORBITAL GATEWAY            |
|        cleared for departure         |
+--------------------------------------+";

const ROCKET: &str = r"        /\
       /  \
      | OG |
     /|    |\
    / | [] | \
      +----+
   orbital-gateway";

const PLAIN: &str = ">> orbital-gateway :: boot sequence complete <<";

fn main() -> termsplash::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut splash = SplashScreen::with_config(SplashConfig::new().with_min_width(48));
    splash.add_splash(GATE);
    splash.add_splash(ROCKET);
    splash.add_splash(PLAIN);

    splash.write_splash(&mut std::io::stdout())?;
    Ok(())
}
