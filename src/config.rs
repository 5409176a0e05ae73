/// The configuration parameters for the application.
#[derive(clap::Parser, Clone)]
pub struct Config {
    /// The connection URL for the database this application should use.
    #[clap(long, env)]
    pub database_url: String,

    /// The name for the database this application should use.
    #[clap(long, env)]
    pub database_name: String,

    /// The maximum number of connections kept open to the database.
    #[clap(long, env, default_value_t = 50)]
    pub database_pool_size: u32,

    /// The PORT number for the server address.
    #[clap(long, env)]
    pub port: u16,
}
