use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tiffin::domain::cart::Cart;
use tiffin::domain::menu::{Category, MenuItem, Price};

fn dish(id: &str, price: Decimal) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: id.to_uppercase(),
        description: String::new(),
        price: Price::new(price).unwrap(),
        category: Category::MainCourse,
    }
}

/// Recomputes the total from scratch, independently of `Cart::total`.
fn reference_total(cart: &Cart) -> Decimal {
    cart.lines()
        .iter()
        .map(|line| line.price.value() * Decimal::from(line.quantity))
        .sum()
}

#[test]
fn totals_never_drift_over_long_random_sequences() {
    // Awkward prices on purpose: these accumulate visible error under f64.
    let menu: Vec<MenuItem> = [
        ("idli", dec!(85.10)),
        ("dosa", dec!(120.95)),
        ("vada", dec!(0.01)),
        ("thali", dec!(249.99)),
        ("coffee", dec!(39.33)),
    ]
    .into_iter()
    .map(|(id, price)| dish(id, price))
    .collect();

    let mut rng = StdRng::seed_from_u64(7);
    let mut cart = Cart::new();

    for _ in 0..2000 {
        let item = &menu[rng.gen_range(0..menu.len())];
        match rng.gen_range(0..4) {
            0 | 1 => cart.add(item),
            2 => cart.change_quantity(&item.id, rng.gen_range(-3..=3)),
            _ => {
                if rng.gen_bool(0.2) {
                    cart.remove(&item.id);
                }
            }
        }

        assert_eq!(cart.total(), reference_total(&cart));
        for line in cart.lines() {
            assert!(line.quantity >= 1);
        }
    }
}

#[test]
fn removing_the_full_quantity_prunes_the_line() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let mut cart = Cart::new();
        let item = dish("idli", dec!(85.10));
        let additions = rng.gen_range(1..50);
        for _ in 0..additions {
            cart.add(&item);
        }
        let quantity = cart.lines()[0].quantity;

        cart.change_quantity("idli", -(quantity as i32));

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}

#[test]
fn duplicate_ids_never_appear() {
    let mut rng = StdRng::seed_from_u64(23);
    let menu: Vec<MenuItem> = (0..3)
        .map(|i| dish(&format!("dish-{i}"), dec!(10.00)))
        .collect();
    let mut cart = Cart::new();

    for _ in 0..500 {
        cart.add(&menu[rng.gen_range(0..menu.len())]);
    }

    let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.item_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), cart.len());
    assert!(cart.len() <= 3);
}
