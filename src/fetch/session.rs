use std::future::Future;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow, bail};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::signal::OperatorSignal;
use crate::telemetry::ctx::LogCtx;
use crate::telemetry::ops::fetch::{Fetch, Phase as FetchPhase};

pub const INVALID_MARKER: &str = "Invalid Request";
pub const CASE_MARKERS: [&str; 2] = ["Case Details", "Petitioner"];

const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// What the current page content says about the search outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The portal rejected the submission (bad CAPTCHA or stale form).
    Invalid,
    /// At least one case marker is present; ready to extract.
    CasePage,
    /// Neither marker yet; keep polling until the wait bound.
    Pending,
}

pub fn classify(html: &str) -> PageStatus {
    if html.contains(INVALID_MARKER) {
        return PageStatus::Invalid;
    }
    if CASE_MARKERS.iter().any(|m| html.contains(m)) {
        return PageStatus::CasePage;
    }
    PageStatus::Pending
}

/// Anything that can hand back the current page HTML.
pub trait PageSource {
    fn html(&self) -> impl Future<Output = Result<String>> + Send;
}

/// A headful browser on the portal; the operator drives the search form.
pub struct PortalSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl PortalSession {
    /// Launch a visible browser and open the portal landing page. The window
    /// stays interactive so the operator can fill the form and the CAPTCHA.
    pub async fn launch(portal_url: &str) -> Result<Self> {
        let config = BrowserConfig::builder()
            .with_head()
            .build()
            .map_err(|e| anyhow!("browser config: {e}"))?;
        let (browser, mut events) = Browser::launch(config).await?;
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        let page = browser.new_page(portal_url).await?;
        Ok(Self { browser, page, handler })
    }

    pub async fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.page
            .save_screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
                path,
            )
            .await?;
        Ok(())
    }

    pub async fn close(mut self) {
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler.abort();
    }
}

impl PageSource for PortalSession {
    fn html(&self) -> impl Future<Output = Result<String>> + Send {
        async { Ok(self.page.content().await?) }
    }
}

/// Orchestration states between form submission and a verified case page.
enum SessionState {
    /// Suspended until the operator confirms the CAPTCHA-gated submission.
    AwaitingOperator,
    /// Polling the page for a decisive marker, bounded by `deadline`.
    Verifying { deadline: Instant },
    /// The case page arrived.
    Ready(String),
}

/// Drive the session from the operator wait to a verified case page.
///
/// The only transition out of the operator wait is the explicit signal; the
/// verify state then polls within `wait` for either the invalid-request
/// marker (hard failure) or a positive case marker.
pub async fn resolve_case_page<P, S>(
    page: &P,
    signal: &mut S,
    wait: Duration,
    log: &LogCtx<Fetch>,
) -> Result<String>
where
    P: PageSource,
    S: OperatorSignal,
{
    let mut state = SessionState::AwaitingOperator;
    loop {
        state = match state {
            SessionState::AwaitingOperator => {
                let _s = log.span(&FetchPhase::AwaitOperator).entered();
                signal.confirmed().await?;
                SessionState::Verifying { deadline: Instant::now() + wait }
            }
            SessionState::Verifying { deadline } => {
                let _s = log.span(&FetchPhase::Verify).entered();
                let html = page.html().await?;
                match classify(&html) {
                    PageStatus::Invalid => bail!("invalid request or CAPTCHA failed on the portal"),
                    PageStatus::CasePage => SessionState::Ready(html),
                    PageStatus::Pending if Instant::now() >= deadline => {
                        bail!("case page did not load within {}s", wait.as_secs())
                    }
                    PageStatus::Pending => {
                        sleep(POLL_INTERVAL).await;
                        SessionState::Verifying { deadline }
                    }
                }
            }
            SessionState::Ready(html) => return Ok(html),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry;

    #[test]
    fn classify_prefers_invalid_marker() {
        assert_eq!(classify("Invalid Request and Case Details"), PageStatus::Invalid);
        assert_eq!(classify("Case Details for 123"), PageStatus::CasePage);
        assert_eq!(classify("Petitioner vs Respondent"), PageStatus::CasePage);
        assert_eq!(classify("still loading"), PageStatus::Pending);
    }

    struct ImmediateSignal;
    impl OperatorSignal for ImmediateSignal {
        fn confirmed(&mut self) -> impl Future<Output = Result<()>> + Send {
            async { Ok(()) }
        }
    }

    struct FixedPage(&'static str);
    impl PageSource for FixedPage {
        fn html(&self) -> impl Future<Output = Result<String>> + Send {
            async { Ok(self.0.to_string()) }
        }
    }

    #[tokio::test]
    async fn returns_html_once_markers_present() {
        let page = FixedPage("<h3>Case Details</h3>");
        let html = resolve_case_page(
            &page,
            &mut ImmediateSignal,
            Duration::from_secs(5),
            &telemetry::fetch(),
        )
        .await
        .unwrap();
        assert!(html.contains("Case Details"));
    }

    #[tokio::test]
    async fn invalid_marker_fails_the_lookup() {
        let page = FixedPage("Invalid Request");
        let err = resolve_case_page(
            &page,
            &mut ImmediateSignal,
            Duration::from_secs(5),
            &telemetry::fetch(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("CAPTCHA"));
    }

    #[tokio::test]
    async fn pending_page_times_out_at_the_bound() {
        let page = FixedPage("<p>blank portal frame</p>");
        let err = resolve_case_page(
            &page,
            &mut ImmediateSignal,
            Duration::ZERO,
            &telemetry::fetch(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("did not load"));
    }
}
