#![allow(non_snake_case)]
use RustedInterp::Examples::spline_examples::spline_examples;

fn main() {
    let example = 0;
    match example {
        0 | 1 | 2 | 3 => {
            if let Err(e) = spline_examples(example) {
                eprintln!("example {} failed: {}", example, e);
            }
        }
        _ => {
            // run every example
            for i in 0..4 {
                if let Err(e) = spline_examples(i) {
                    eprintln!("example {} failed: {}", i, e);
                }
            }
        }
    }
}
