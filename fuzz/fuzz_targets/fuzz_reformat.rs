// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use commitpad::domain::Message;
use commitpad::services::reformat::Reformatter;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (title, body) = s.split_once('\0').unwrap_or((s, ""));
        let reformatter = Reformatter::default();
        let once = reformatter.reformat(&Message::new(title, body));
        assert!(!once.title.contains('\n'));
    }
});
