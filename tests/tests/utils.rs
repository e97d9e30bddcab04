use std::sync::OnceLock;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

#[allow(unused)]
pub fn init() {
    static ONCE_LOCK: OnceLock<()> = OnceLock::new();

    ONCE_LOCK.get_or_init(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            default_panic(info);
            error!("Panic occurred: {info:?}");
            std::process::exit(1);
        }));

        let _ = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_env_filter("chatswarm=debug,mock_service=debug")
            .try_init();
    });
}
