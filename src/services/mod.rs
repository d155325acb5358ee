// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

pub mod comments;
pub mod message_file;
pub mod reformat;
pub mod session;
