use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "taller",
    bin_name = "taller",
    version,
    about = "Gestión de inventario y usuarios para talleres escolares",
    long_about = None
)]
pub struct Cli {
    /// Directorio donde viven los archivos de datos JSON
    #[arg(long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Salida detallada (equivale a TALLER_LOG=debug)
    #[arg(short, long)]
    pub verbose: bool,
}
