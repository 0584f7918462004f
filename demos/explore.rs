use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    acervo::example_apps::run_explore_demo(std::env::args().skip(1))
}
