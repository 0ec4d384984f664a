use clap::Args;

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub struct DbArgs {
    #[arg(
        long,
        env = "CADENCE_DB_URL",
        default_value = "sqlite://cadence.sqlite?mode=rwc",
        help = "Database the entries are stored in"
    )]
    pub db_url: String,

    #[arg(long, help = "Min connections")]
    pub db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub db_max_connections: Option<u32>,
}
