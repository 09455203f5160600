use crate::api::graphql::inputs::{CustomerInput, OrderInput, ProductInput};
use crate::api::graphql::types::{CustomerType, OrderType, ProductType};
use crate::data::models::customer::{Customer, CustomerDraft};
use crate::data::models::order::{OrderDetails, OrderDraft};
use crate::data::models::product::{Product, ProductDraft};

impl From<CustomerInput> for CustomerDraft {
    fn from(input: CustomerInput) -> Self {
        CustomerDraft {
            name: input.name,
            email: input.email,
            phone: input.phone,
            created_at: input.created_at.map(|at| at.naive_utc()),
        }
    }
}

impl From<ProductInput> for ProductDraft {
    fn from(input: ProductInput) -> Self {
        ProductDraft {
            name: input.name,
            price: input.price,
            stock: input.stock,
            created_at: input.created_at.map(|at| at.naive_utc()),
        }
    }
}

impl From<OrderInput> for OrderDraft {
    fn from(input: OrderInput) -> Self {
        OrderDraft {
            customer_id: input.customer_id,
            product_ids: input.product_ids,
            order_date: input.order_date.map(|at| at.naive_utc()),
        }
    }
}

impl From<Customer> for CustomerType {
    fn from(customer: Customer) -> Self {
        CustomerType {
            id: customer.customer_id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created_at: customer.created_at.and_utc(),
        }
    }
}

impl From<Product> for ProductType {
    fn from(product: Product) -> Self {
        ProductType {
            id: product.product_id,
            name: product.name,
            price: product.price,
            stock: product.stock,
            created_at: product.created_at.and_utc(),
        }
    }
}

impl From<OrderDetails> for OrderType {
    fn from(details: OrderDetails) -> Self {
        let OrderDetails {
            order,
            customer,
            products,
        } = details;

        OrderType {
            id: order.order_id,
            customer: CustomerType::from(customer),
            products: products.into_iter().map(ProductType::from).collect(),
            total_amount: order.total_amount,
            order_date: order.order_date.and_utc(),
            created_at: order.created_at.and_utc(),
        }
    }
}
