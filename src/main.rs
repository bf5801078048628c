fn main() {
    cvd_weights::app::cli::run_check();
}
