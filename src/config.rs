use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "poolmon", version, about = "A real-time terminal pool monitor")]
pub struct Config {
    /// Base URL of the pool controller service
    #[arg(short, long, env = "POOLMON_URL", default_value = "http://127.0.0.1:5000")]
    pub url: String,

    /// Data poll interval in milliseconds
    #[arg(short, long, default_value_t = 2500, value_parser = clap::value_parser!(u64).range(500..=60000))]
    pub poll_interval: u64,

    /// Animation tick in milliseconds
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(20..=1000))]
    pub tick_rate: u64,
}
