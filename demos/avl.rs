use search_trees::AvlTree;
use search_trees::data_gen::shuffled_range;

fn main() {
    let mut tree = AvlTree::new();
    for &key in &[4u64, 6, 3, 5, 1, 7, 2] {
        tree.insert(key);
    }
    tree.pretty_print();
    println!("root: {}", tree.root());

    // ascending inserts would degenerate a plain BST; the AVL tree stays flat
    let mut tree2 = AvlTree::new();
    tree2.insert_range(1u64..=15);
    tree2.pretty_print();

    let mut tree3 = AvlTree::new();
    tree3.insert_range(shuffled_range(1, 1000));
    println!(
        "1000 random keys: height {}, min {:?}, max {:?}",
        tree3.height(),
        tree3.min(),
        tree3.max()
    );
    println!("contains 500: {}", tree3.contains(&500));
    println!("contains 1001: {}", tree3.contains(&1001));
}
