use std::error::Error;

use bulkscale::plan::BatchPlan;

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    // No command line surface: running the binary performs the one
    // compiled-in batch over the scan set.
    BatchPlan::default().execute()?;
    Ok(())
}
