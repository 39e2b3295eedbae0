//! Symmetries of the pentagon.

use gruppe::Group;

fn main() {
    let group = Group::dihedral(5).unwrap();

    let rot = group.rotation(1);
    let refl = group.reflection(0);

    println!("{} has order {}", group, group.order().unwrap());
    println!("rot_1 * rot_4 = {}", &rot * &group.rotation(4));
    println!("ref_0 * ref_2 = {}", &refl * &group.reflection(2));
    println!("ref_0 * rot_1 * ref_0 = {}", &(&refl * &rot) * &refl);

    for element in group.elements().unwrap() {
        println!("{}^-1 = {}", element, element.inverse());
    }
}
