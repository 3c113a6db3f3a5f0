use simplelog::{Config, LevelFilter, SimpleLogger};

const NUM_OF_OPERATIONS: usize = 50_000;

fn init_logger() {
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}

macro_rules! bst_set_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use ordered_trees::$module_name::$type_name;
                use ordered_trees::{Error, Order};
                use rand::Rng;
                use super::{init_logger, NUM_OF_OPERATIONS};

                #[test]
                fn int_test_set() {
                    init_logger();
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    let mut expected = Vec::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen::<u32>() % 10_000;

                        tree.insert(key);
                        expected.push(key);
                    }

                    expected.sort();
                    assert_eq!(tree.len(), expected.len());
                    assert_eq!(
                        tree.iter().collect::<Vec<&u32>>(),
                        expected.iter().collect::<Vec<&u32>>(),
                    );
                    assert_eq!(tree.min(), Ok(&expected[0]));
                    assert_eq!(tree.max(), Ok(&expected[expected.len() - 1]));

                    rng.shuffle(&mut expected);
                    for (i, key) in expected.iter().enumerate() {
                        assert!(tree.contains(key));
                        assert_eq!(tree.remove(key), Some(*key));
                        assert_eq!(tree.len(), expected.len() - i - 1);
                    }

                    assert!(tree.is_empty());
                    assert_eq!(tree.height(), 0);
                    assert_eq!(tree.traverse(Order::InOrder), Err(Error::EmptyStructure));
                }

                #[test]
                fn int_test_remove_absent() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut tree = $type_name::new();
                    for _ in 0..1000 {
                        tree.insert(rng.gen::<u32>() % 1000 * 2);
                    }

                    for i in 0..1000 {
                        assert_eq!(tree.remove(&(i * 2 + 1)), None);
                    }
                    assert_eq!(tree.len(), 1000);
                }

                #[test]
                fn int_test_traversals() {
                    let tree: $type_name<u32> = vec![5, 3, 8, 1, 4, 7, 9].into_iter().collect();
                    assert_eq!(
                        tree.traverse(Order::InOrder),
                        Ok(vec![&1, &3, &4, &5, &7, &8, &9]),
                    );
                    assert_eq!(tree.height(), 3);

                    let pre_order = tree.traverse(Order::PreOrder).unwrap();
                    let post_order = tree.traverse(Order::PostOrder).unwrap();
                    assert_eq!(pre_order[0], tree.root().unwrap());
                    assert_eq!(post_order[post_order.len() - 1], tree.root().unwrap());
                }

                #[test]
                fn int_test_traverse_by_name() {
                    let tree: $type_name<u32> = vec![2, 1, 3].into_iter().collect();
                    let order = "post".parse::<Order>().unwrap();
                    assert_eq!(tree.traverse(order), Ok(vec![&1, &3, &2]));
                    assert!("breadth".parse::<Order>().is_err());
                }

                #[test]
                fn int_test_equality() {
                    let a: $type_name<u32> = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
                    let b: $type_name<u32> = vec![4, 6, 2, 7, 5, 3, 1].into_iter().collect();
                    assert_eq!(a, b);

                    let mut c = a.clone();
                    c.remove(&1);
                    assert_ne!(a, c);
                    c.insert(1);
                    assert_eq!(a, c);
                }
            }
        )*
    }
}

bst_set_tests!(bst: BinarySearchTree, avl_tree: AvlTree);
