use search_trees::BitTrie;
use search_trees::data_gen::generate_uniform_u64;

fn main() {
    let mut trie = BitTrie::new(3).expect("valid depth");
    for &key in &[2u64, 5, 7] {
        println!("inserting key: {}", key);
        trie.insert(key);
    }
    trie.pretty_print();

    for query in 0..8u64 {
        match trie.max_xor(query) {
            Some(best) => println!("max xor against {} is {}", query, best),
            None => println!("max xor against {} is None", query),
        }
    }

    let mut trie2 = BitTrie::with_default_depth();
    let keys = generate_uniform_u64(32, 0, (1 << 16) - 1);
    for &key in &keys {
        trie2.insert(key);
    }
    let query = 0b1010_1010_1010_1010;
    println!(
        "depth-16 trie with {} random keys: max xor against {} is {:?}",
        keys.len(),
        query,
        trie2.max_xor(query)
    );
}
