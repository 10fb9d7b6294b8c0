#![no_main]
use libfuzzer_sys::fuzz_target;

use dominator::fuzzing::domtree::{check, TestCase};

fuzz_target!(|testcase: TestCase| {
    check(testcase);
});
