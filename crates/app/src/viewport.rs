use dioxus::prelude::*;

use crate::session::{use_session, use_viewport};

/// Registers a `resize` listener and streams `window.innerWidth` back,
/// starting with the current width.
const ATTACH_RESIZE: &str = r#"
    const report = () => dioxus.send(window.innerWidth);
    window.__campuslyResize = report;
    window.addEventListener("resize", report);
    report();
    await new Promise(() => {});
"#;

const DETACH_RESIZE: &str = r#"
    if (window.__campuslyResize) {
        window.removeEventListener("resize", window.__campuslyResize);
        delete window.__campuslyResize;
    }
"#;

/// Headless component that feeds window widths into the session.
///
/// Mount once inside the authenticated shell: the listener exists from
/// sign-in until the shell unmounts at sign-out.
#[component]
pub fn ViewportListener() -> Element {
    let mut session = use_session();
    let mut viewport = use_viewport();

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut listener = document::eval(ATTACH_RESIZE);
        tracing::debug!("resize listener attached");

        loop {
            match listener.recv::<u32>().await {
                Ok(width) => {
                    tracing::trace!(width, "viewport resized");
                    if viewport.report(session.role(), width) {
                        tracing::debug!(width, "layout variant changed");
                    }
                    session.on_resize(width);
                }
                Err(e) => {
                    tracing::debug!(error = ?e, "resize listener closed");
                    break;
                }
            }
        }
    });

    use_drop(|| {
        document::eval(DETACH_RESIZE);
        tracing::debug!("resize listener removed");
    });

    rsx! {}
}
