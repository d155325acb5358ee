// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitpad::domain::CommentMarker;
use commitpad::services::comments::{detect_marker, has_marker_line, split_message};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let lines: Vec<&str> = text.lines().collect();
    let marker = detect_marker(&lines, CommentMarker::DEFAULT);
    if let Some(message) = split_message(&lines, marker) {
        let _ = has_marker_line(&message.compose(), marker);
    }
});
