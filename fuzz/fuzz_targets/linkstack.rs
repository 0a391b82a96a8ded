#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linkstack::{EmptyContainerError, Stack};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Peek,
    Erase,
    Duplicate,
    DuplicateInto(usize),
    Stash,
}

use self::Action::*;

fn stashed<A>(stash: &[A], index: usize) -> Option<usize> {
    if stash.is_empty() {
        None
    } else {
        Some(index % stash.len())
    }
}

fn check(stack: &Stack<String>, model: &[String]) {
    assert_eq!(model.len(), stack.len());
    assert_eq!(model.is_empty(), stack.is_empty());
    assert_eq!(model.last().ok_or(EmptyContainerError), stack.peek());
}

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model: Vec<String> = Vec::new();
    let mut stash = Vec::new();
    for action in actions {
        match action {
            Push(data) => {
                stack.push(data.clone());
                model.push(data);
            }
            Pop => {
                assert_eq!(model.pop().ok_or(EmptyContainerError), stack.pop());
            }
            Peek => {
                assert_eq!(model.last().ok_or(EmptyContainerError), stack.peek());
            }
            Erase => {
                stack.erase();
                model.clear();
            }
            Duplicate => {
                stack = stack.clone();
            }
            DuplicateInto(index) => {
                if let Some(index) = stashed(&stash, index) {
                    let (copy, copy_model): &mut (Stack<String>, Vec<String>) = &mut stash[index];
                    copy.clone_from(&stack);
                    copy_model.clone_from(&model);
                }
            }
            Stash => {
                stash.push((stack.clone(), model.clone()));
            }
        }
        check(&stack, &model);
        for (copy, copy_model) in &stash {
            check(copy, copy_model);
        }
    }
});
