// Landing page sections, top to bottom

mod cta;
mod features;
mod footer;
mod hero;
mod nav;
mod stats;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::{Nav, NavBar};
pub use stats::Stats;
