use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Directory (or comma-separated list of directories) containing backgrounds
    #[arg(short, long, value_name = "SPEC")]
    pub dirs: Option<String>,

    /// Change the lockscreen background as well
    #[arg(short, long)]
    pub lockscreen: bool,

    /// Search images recursively
    #[arg(short, long)]
    pub recursive: bool,

    /// Leave the last scanned image out of the random draw
    #[arg(long)]
    pub exclude_last: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RotateArgs {
    /// Seconds to keep each background before rotating
    #[arg(short, long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args, Debug, Clone)]
pub struct NextArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// Path to the wallpaper image
    pub path: String,

    /// Change the lockscreen background as well
    #[arg(short, long)]
    pub lockscreen: bool,
}
