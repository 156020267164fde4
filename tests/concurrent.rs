//! Shared grammars used from several threads at once
//!
//! A grammar is built once and borrowed by every worker; each worker owns
//! the cursor over its own input.

use anyhow::Result;
use retrace::grammar::{Number, number};
use retrace::{
    AndExt, BoxedExt, BoxedParser, ByteCursor, MapExt, lazy, literal, one_of, run_complete, zero_or_one,
};
use std::thread;

fn inputs() -> Vec<(String, Number)> {
    (0..64)
        .map(|i| {
            if i % 2 == 0 {
                (format!("{:04}", i * 37), Number::Integer(i * 37))
            } else {
                (format!("{}.25", i), Number::Float(i as f64 + 0.25))
            }
        })
        .collect()
}

#[test]
fn number_grammar_shared_across_threads() -> Result<()> {
    let cases = inputs();
    let grammar = number();

    thread::scope(|scope| {
        let workers: Vec<_> = cases
            .chunks(8)
            .map(|chunk| {
                let grammar = &grammar;
                scope.spawn(move || {
                    for (text, expected) in chunk {
                        let value = run_complete(grammar, text.as_bytes())
                            .unwrap_or_else(|error| panic!("{}: {}", text, error));
                        assert_eq!(value, *expected, "input {}", text);
                    }
                })
            })
            .collect();

        for worker in workers {
            worker.join().expect("worker panicked");
        }
    });
    Ok(())
}

#[test]
fn concurrent_failures_do_not_interfere() {
    let grammar = number();
    let good = b"1234.5";
    let bad = b"12a";

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert_eq!(run_complete(&grammar, good).unwrap(), Number::Float(1234.5));
                    let error = run_complete(&grammar, bad).unwrap_err();
                    assert_eq!(error.position(), 2);
                }
            });
        }
    });
}

/// Nesting depth of `[` `]` pairs around a single digit
fn nested<'code>() -> BoxedParser<'code, ByteCursor<'code>, usize> {
    let digit = one_of((b'0'..=b'9').map(literal)).map(|_| 0);
    let bracketed = literal(b'[')
        .and(lazy(nested))
        .and(literal(b']'))
        .map(|((_, depth), _)| depth + 1);
    zero_or_one(bracketed)
        .and(zero_or_one(digit))
        .map(|(bracketed, digit)| bracketed.or(digit).unwrap_or(0))
        .boxed()
}

#[test]
fn recursive_grammar_built_per_worker() -> Result<()> {
    let inputs: Vec<String> = (0..16)
        .map(|depth| format!("{}7{}", "[".repeat(depth), "]".repeat(depth)))
        .collect();

    let depths = thread::scope(|scope| {
        let workers: Vec<_> = inputs
            .iter()
            .map(|input| {
                scope.spawn(move || {
                    run_complete(&nested(), input.as_bytes()).map_err(|error| error.to_string())
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    for (expected, depth) in depths.into_iter().enumerate() {
        assert_eq!(depth.map_err(anyhow::Error::msg)?, expected);
    }
    Ok(())
}
