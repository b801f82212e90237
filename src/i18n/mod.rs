// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded in the binary. The locale is
//! picked from the `--lang` CLI argument, then `[general] language` in the
//! config file, then the system locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
