//! Server-rendered session page.
//!
//! The page is one embedded template: session metadata, a timeline of
//! step markers, and the client-side controller that pages through steps
//! via `/get_step/{index}`. Rendering is a pure substitution into the
//! template; everything substituted is HTML-escaped first.

use std::fmt::Write;

use axum::extract::State;
use axum::response::Html;

use session_log::{SessionLog, StepCursor};

use crate::app_state::AppState;

/// `GET /`
///
/// Renders the loaded session, or the file-selection prompt when the
/// session slot is empty.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    match state.session().await {
        Some(session) => Html(render_index(&session)),
        None => Html(NO_LOG_HTML.to_string()),
    }
}

/// Render the session page. Pure function of the loaded session.
pub fn render_index(session: &SessionLog) -> String {
    let cursor = StepCursor::new(session.total_steps());
    let config_pretty = serde_json::to_string_pretty(&session.config)
        .unwrap_or_else(|_| session.config.to_string());

    INDEX_HTML
        .replace("__PROBLEM__", &escape_html(&session.problem))
        .replace("__UUID__", &escape_html(&session.uuid))
        .replace(
            "__SUCCESS_CLASS__",
            if session.success { "ok" } else { "fail" },
        )
        .replace("__SUCCESS__", if session.success { "yes" } else { "no" })
        .replace("__CONFIG__", &escape_html(&config_pretty))
        .replace("__TOTAL_STEPS__", &session.total_steps().to_string())
        .replace("__MARKERS__", &render_markers(session.total_steps()))
        .replace(
            "__PREV_DISABLED__",
            disabled_attr(cursor.map_or(true, |c| !c.has_prev())),
        )
        .replace(
            "__NEXT_DISABLED__",
            disabled_attr(cursor.map_or(true, |c| !c.has_next())),
        )
}

/// One clickable marker per step index.
fn render_markers(total_steps: usize) -> String {
    let mut out = String::new();
    for index in 0..total_steps {
        let active = if index == 0 { " active" } else { "" };
        let _ = write!(
            &mut out,
            r#"<div class="marker{active}" data-step="{index}" onclick="selectStep({index})">Step {index}</div>"#,
        );
    }
    out
}

fn disabled_attr(disabled: bool) -> &'static str {
    if disabled {
        "disabled"
    } else {
        ""
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Session Viewer</title>
    <style>
        :root {
            --bg: #12141c;
            --card: #1b1f2b;
            --panel: #242a3a;
            --accent: #5b8def;
            --text: #e6e8ee;
            --muted: #8a90a3;
            --ok: #4ade80;
            --fail: #f87171;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'SF Mono', 'Consolas', monospace;
            background: var(--bg);
            color: var(--text);
            min-height: 100vh;
            padding: 24px;
        }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { font-size: 1.3rem; margin-bottom: 16px; color: var(--accent); }
        .metadata {
            background: var(--card);
            border-radius: 10px;
            padding: 16px 20px;
            margin-bottom: 16px;
        }
        .metadata dt {
            font-size: 0.75rem;
            color: var(--muted);
            text-transform: uppercase;
            letter-spacing: 1px;
            margin-top: 10px;
        }
        .metadata dt:first-child { margin-top: 0; }
        .metadata dd { margin: 4px 0 0 0; font-size: 0.9rem; }
        .badge {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 10px;
            font-size: 0.75rem;
            font-weight: 600;
        }
        .badge.ok { background: var(--ok); color: #05250f; }
        .badge.fail { background: var(--fail); color: #3d0606; }
        .config-block {
            background: var(--bg);
            border-radius: 8px;
            padding: 12px;
            font-size: 0.8rem;
            line-height: 1.5;
            white-space: pre-wrap;
            word-break: break-word;
            max-height: 240px;
            overflow-y: auto;
        }
        .timeline {
            background: var(--card);
            border-radius: 10px;
            padding: 14px 20px;
            margin-bottom: 16px;
            display: flex;
            align-items: center;
            gap: 8px;
            flex-wrap: wrap;
        }
        .marker {
            padding: 8px 12px;
            background: var(--panel);
            border-radius: 8px;
            cursor: pointer;
            font-size: 0.8rem;
            border-left: 3px solid transparent;
            transition: background 0.15s;
        }
        .marker:hover { background: #2e3650; }
        .marker.active {
            background: #2e3650;
            border-left-color: var(--accent);
        }
        .nav {
            margin-left: auto;
            display: flex;
            gap: 8px;
        }
        button {
            background: var(--accent);
            color: #0b1220;
            border: none;
            padding: 8px 18px;
            border-radius: 8px;
            font-family: inherit;
            font-size: 0.85rem;
            font-weight: 600;
            cursor: pointer;
        }
        button:hover:not(:disabled) { opacity: 0.9; }
        button:disabled { opacity: 0.4; cursor: not-allowed; }
        .details {
            background: var(--card);
            border-radius: 10px;
            padding: 20px;
        }
        .details h2 { font-size: 1rem; margin-bottom: 14px; color: var(--accent); }
        .detail-section { margin-bottom: 18px; }
        .detail-section h3 {
            font-size: 0.78rem;
            color: var(--muted);
            text-transform: uppercase;
            letter-spacing: 1px;
            margin-bottom: 8px;
        }
        .detail-section h4 {
            font-size: 0.75rem;
            color: var(--accent);
            margin: 10px 0 6px 0;
        }
        .block {
            background: var(--bg);
            border-radius: 8px;
            padding: 12px;
            font-size: 0.82rem;
            line-height: 1.5;
            white-space: pre-wrap;
            word-break: break-word;
        }
        .block.prompt { border-left: 3px solid var(--accent); }
        .block.response { border-left: 3px solid var(--ok); }
        .none { color: var(--muted); font-style: italic; }
        .placeholder { color: var(--muted); }
    </style>
</head>
<body>
    <div class="container">
        <h1>Session Viewer</h1>

        <dl class="metadata">
            <dt>Problem</dt>
            <dd>__PROBLEM__</dd>
            <dt>Run</dt>
            <dd>__UUID__</dd>
            <dt>Success</dt>
            <dd><span class="badge __SUCCESS_CLASS__">__SUCCESS__</span></dd>
            <dt>Config</dt>
            <dd><pre class="config-block">__CONFIG__</pre></dd>
        </dl>

        <div class="timeline">
            __MARKERS__
            <div class="nav">
                <button id="prevBtn" onclick="prevStep()" __PREV_DISABLED__>Previous</button>
                <button id="nextBtn" onclick="nextStep()" __NEXT_DISABLED__>Next</button>
            </div>
        </div>

        <div class="details" id="details">
            <p class="placeholder">No step selected</p>
        </div>
    </div>

    <script>
        const TOTAL_STEPS = __TOTAL_STEPS__;
        let currentStep = null;

        async function selectStep(index) {
            if (index < 0 || index >= TOTAL_STEPS) return;
            let step;
            try {
                const response = await fetch(`/get_step/${index}`);
                if (!response.ok) return; // keep the current panel
                step = await response.json();
            } catch (err) {
                return; // keep the current panel
            }
            currentStep = index;
            renderStep(step);
            updateControls();
        }

        function prevStep() {
            if (currentStep !== null && currentStep > 0) selectStep(currentStep - 1);
        }

        function nextStep() {
            if (currentStep !== null && currentStep < TOTAL_STEPS - 1) selectStep(currentStep + 1);
        }

        function updateControls() {
            document.querySelectorAll('.marker').forEach((el, i) => {
                el.classList.toggle('active', i === currentStep);
            });
            document.getElementById('prevBtn').disabled =
                currentStep === null || currentStep === 0;
            document.getElementById('nextBtn').disabled =
                currentStep === null || currentStep >= TOTAL_STEPS - 1;
        }

        function section(title, text) {
            const body = text === null
                ? '<span class="none">none</span>'
                : escapeHtml(text);
            return `<div class="detail-section"><h3>${title}</h3><pre class="block">${body}</pre></div>`;
        }

        function renderStep(step) {
            let html = `<h2>Step ${step.step_id}</h2>`;
            html += section('Action', step.action);
            html += section('Observation', step.obs);
            html += section('Rewrite consumed', step.rewrite_consumed);
            if (step.prompt_response_pairs === null) {
                html += section('Prompt/response pairs', null);
            } else {
                html += '<div class="detail-section"><h3>Prompt/response pairs</h3>';
                step.prompt_response_pairs.forEach((pair, i) => {
                    html += `<h4>Exchange ${i}</h4>`;
                    html += `<pre class="block prompt">${escapeHtml(pair.prompt)}</pre>`;
                    html += `<pre class="block response">${escapeHtml(pair.response)}</pre>`;
                });
                html += '</div>';
            }
            html += section('Token usage',
                step.token_usage === null ? null : String(step.token_usage));
            document.getElementById('details').innerHTML = html;
        }

        function escapeHtml(str) {
            return String(str)
                .replace(/&/g, '&amp;')
                .replace(/</g, '&lt;')
                .replace(/>/g, '&gt;')
                .replace(/"/g, '&quot;');
        }

        if (TOTAL_STEPS > 0) {
            selectStep(0);
        }
    </script>
</body>
</html>
"##;

const NO_LOG_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Session Viewer</title>
    <style>
        body {
            font-family: 'SF Mono', 'Consolas', monospace;
            background: #12141c;
            color: #e6e8ee;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            margin: 0;
        }
        .prompt {
            background: #1b1f2b;
            border-radius: 10px;
            padding: 28px 32px;
            max-width: 520px;
        }
        h1 { font-size: 1.1rem; color: #5b8def; margin: 0 0 12px 0; }
        p { font-size: 0.85rem; color: #8a90a3; line-height: 1.6; }
        input {
            width: 100%;
            box-sizing: border-box;
            background: #12141c;
            border: 1px solid #242a3a;
            border-radius: 8px;
            padding: 10px;
            color: #e6e8ee;
            font-family: inherit;
            margin: 12px 0;
        }
        button {
            background: #5b8def;
            color: #0b1220;
            border: none;
            padding: 10px 22px;
            border-radius: 8px;
            font-family: inherit;
            font-weight: 600;
            cursor: pointer;
        }
        .error { color: #f87171; font-size: 0.8rem; min-height: 1.2em; }
    </style>
</head>
<body>
    <div class="prompt">
        <h1>No session log loaded</h1>
        <p>Start the viewer with a log file path, or enter the path of a
        recorded session log below.</p>
        <input id="path" type="text" placeholder="/path/to/session.json">
        <button onclick="loadLog()">Load</button>
        <p class="error" id="error"></p>
    </div>
    <script>
        async function loadLog() {
            const path = document.getElementById('path').value.trim();
            if (!path) return;
            try {
                const response = await fetch('/load', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ path })
                });
                if (response.ok) {
                    window.location.reload();
                    return;
                }
                const body = await response.json();
                document.getElementById('error').textContent =
                    body.error || 'failed to load log';
            } catch (err) {
                document.getElementById('error').textContent = String(err);
            }
        }
    </script>
</body>
</html>
"##;
