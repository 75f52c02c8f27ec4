// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a store price for display.
///
/// A zero price is shown as `Free`. Common currencies get their symbol,
/// anything else is shown with its ISO code after the amount.
///
/// # Arguments
///
/// * `price` - The price, never negative.
/// * `currency` - The ISO 4217 currency code reported by the store.
///
/// # Examples
///
/// ```
/// assert_eq!(format_price(0.0, "USD"), "Free");
/// assert_eq!(format_price(1.29, "USD"), "$1.29");
/// assert_eq!(format_price(250.0, "JPY"), "¥250");
/// assert_eq!(format_price(3.5, "SEK"), "3.50 SEK");
/// ```
pub(crate) fn format_price(price: f64, currency: &str) -> String {
    if price == 0.0 {
        return String::from("Free");
    }

    match currency {
        "USD" => format!("${:.2}", price),
        "AUD" => format!("A${:.2}", price),
        "CAD" => format!("CA${:.2}", price),
        "EUR" => format!("€{:.2}", price),
        "GBP" => format!("£{:.2}", price),
        "INR" => format!("₹{:.2}", price),
        "JPY" => format!("¥{:.0}", price),
        "" => format!("{:.2}", price),
        code => format!("{:.2} {}", price, code),
    }
}

/// Formats a byte count as a short human-readable size, such as `4.2 KB`.
pub(crate) fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;

    let bytes = bytes as f64;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}
