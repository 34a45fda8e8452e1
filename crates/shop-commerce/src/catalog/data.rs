//! The built-in cleat catalog.

use crate::catalog::{Category, Product, ShoeSize};
use crate::money::{Currency, Money};

/// Sizes 6 through 12 in half steps, as every built-in product offers.
fn standard_sizes() -> Vec<ShoeSize> {
    (12..=24).map(|halves| ShoeSize::from_tenths(halves * 5)).collect()
}

fn usd(units: i64) -> Money {
    Money::from_units(units, Currency::USD)
}

#[allow(clippy::too_many_arguments)]
fn cleat(
    id: &str,
    name: &str,
    brand: &str,
    price: i64,
    original_price: Option<i64>,
    image_url: &str,
    category: Category,
    colors: [&str; 3],
    description: &str,
    features: [&str; 3],
) -> Product {
    let mut product = Product::new(id, name, brand, category, usd(price))
        .with_sizes(standard_sizes())
        .with_colors(colors);
    product.original_price = original_price.map(usd);
    product.image_url = Some(image_url.to_string());
    product.description = description.to_string();
    product.features = features.iter().map(|f| f.to_string()).collect();
    product
}

/// The six products of the demo storefront, in display order.
pub(crate) fn builtin_products() -> Vec<Product> {
    let mut mercurial = cleat(
        "1",
        "Mercurial Vapor 15 Elite",
        "Nike",
        275,
        Some(300),
        "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=500&h=500&fit=crop",
        Category::FirmGround,
        ["Negro/Oro", "Blanco/Azul", "Rojo/Negro"],
        "Diseñados para velocidad explosiva en terreno firme.",
        ["Suela de carbono", "Upper sintético", "Ajuste ceñido"],
    );
    mercurial.is_new = true;
    mercurial.is_on_sale = true;

    let mut predator = cleat(
        "2",
        "Predator Accuracy.1",
        "Adidas",
        250,
        None,
        "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&h=500&fit=crop",
        Category::FirmGround,
        ["Negro/Rojo", "Blanco/Negro", "Azul/Blanco"],
        "Control y precisión absolutos en cada toque.",
        ["Tecnología FACET", "Suela Controlframe", "Upper Hybridtouch"],
    );
    predator.is_new = true;

    let future = cleat(
        "3",
        "Future 7 Ultimate",
        "Puma",
        220,
        None,
        "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500&h=500&fit=crop",
        Category::FirmGround,
        ["Verde/Negro", "Blanco/Dorado", "Negro/Naranja"],
        "Libertad de movimiento y agilidad extrema.",
        ["Sistema FUZIONFIT360", "Suela Dynamic Motion", "Upper adaptativo"],
    );

    let phantom = cleat(
        "4",
        "Phantom GX Elite",
        "Nike",
        230,
        None,
        "https://images.unsplash.com/photo-1579952363873-27d3bfad9c0d?w=500&h=500&fit=crop",
        Category::FirmGround,
        ["Blanco/Negro", "Negro/Blanco", "Azul/Blanco"],
        "Precisión y potencia en cada disparo.",
        ["Tecnología Gripknit", "Suela Cyclone 360", "Zona de golpeo texturizada"],
    );

    let mut copa = cleat(
        "5",
        "Copa Pure.1",
        "Adidas",
        200,
        Some(240),
        "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500&h=500&fit=crop",
        Category::FirmGround,
        ["Negro/Blanco", "Blanco/Negro", "Marrón/Oro"],
        "Comodidad clásica con tecnología moderna.",
        ["Upper de cuero K", "Suela Controlframe", "Acolchado premium"],
    );
    copa.is_on_sale = true;

    let ultra = cleat(
        "6",
        "Ultra Ultimate",
        "Puma",
        180,
        None,
        "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa?w=500&h=500&fit=crop",
        Category::ArtificialGrass,
        ["Amarillo/Negro", "Blanco/Azul", "Negro/Rojo"],
        "Velocidad y agilidad en césped artificial.",
        ["Upper MATRYXEVO", "Suela SpeedUnit", "Diseño ultraligero"],
    );

    vec![mercurial, predator, future, phantom, copa, ultra]
}
