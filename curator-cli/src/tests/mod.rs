//! Test harness modules for the curator CLI.

use super::*;
