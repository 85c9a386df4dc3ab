// SPDX-License-Identifier: MIT OR Apache-2.0

/**
Builds a `Vec<Value>` key/value sequence.

Each argument goes through [IntoValue](crate::IntoValue), so strings stay strings and
scalars render as themselves.

```rust
use scopewise::kv;

let fields = kv!["user", "alice", "retries", 2];
assert_eq!(fields.len(), 4);
```
*/
#[macro_export]
macro_rules! kv {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::IntoValue::into_value($item)),+]
    };
}
