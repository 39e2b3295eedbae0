//! Composing permutations of five letters in cycle notation.

use gruppe::Group;

fn main() {
    let group = Group::permutation(5).unwrap();

    let a = group.parse_cycles("(1 2 5) (3 4)").unwrap();
    let b = group.elem(vec![5u32, 4, 3, 2, 1]).unwrap();

    println!("a      = {}  i.e. {}", a, a.to_cycles());
    println!("b      = {}  i.e. {}", b, b.to_cycles());

    let ab = &a * &b;
    println!("a * b  = {}  i.e. {}", ab, ab.to_cycles());
    println!("a^-1   = {}", a.inverse().to_cycles());
    println!("a^3    = {}", a.pow(3).to_cycles());

    println!("|S_5|  = {}", group.order().unwrap());
}
