//! this script runs the toll pipeline stages over CSV distance tables: matrix
//! aggregation, unrolling, threshold selection and toll pricing.
use bambam_toll::toll::app::TollApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = TollApp::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam_toll: {e}");
            std::process::exit(1);
        }
    }
}
