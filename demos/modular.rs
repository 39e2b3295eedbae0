//! Arithmetic in the additive and multiplicative groups mod 10.

use gruppe::{Group, Op};

fn main() {
    let add = Group::modular(Op::Add, 10).unwrap();
    let sum = add.compose([7, 8, 9]).unwrap();
    println!("7 + 8 + 9 = {} in {}", sum, add);
    println!("-(7) = {}", add.inverse(7).unwrap());

    let mul = Group::modular(Op::Mul, 10).unwrap();
    println!("units mod 10: {:?}", mul
        .elements()
        .unwrap()
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>());
    println!("7 * 7 * 7 = {}", mul.exp(7, 3).unwrap());
    println!("7^-1 = {}", mul.inverse(7).unwrap());

    match mul.elem(4) {
        Ok(element) => println!("4 is a unit: {}", element),
        Err(error) => println!("rejected: {}", error),
    }
}
