use std::future::Future;

use anyhow::Result;

/// External confirmation that the operator finished the manual steps
/// (form filled, CAPTCHA solved, search submitted).
///
/// The lookup pipeline suspends on this; the single transition forward is
/// one confirmation.
pub trait OperatorSignal {
    fn confirmed(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// ENTER on the controlling terminal.
pub struct StdinSignal;

impl OperatorSignal for StdinSignal {
    fn confirmed(&mut self) -> impl Future<Output = Result<()>> + Send {
        async {
            tokio::task::spawn_blocking(|| {
                let mut line = String::new();
                std::io::stdin().read_line(&mut line).map(|_| ())
            })
            .await??;
            Ok(())
        }
    }
}
