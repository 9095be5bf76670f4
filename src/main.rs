mod app;
mod entry;
mod system;

use volley::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
