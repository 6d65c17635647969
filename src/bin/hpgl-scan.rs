use anyhow::Result;

fn main() -> Result<()> {
    hpgl_input::cli::run()
}
