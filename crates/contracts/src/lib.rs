//! Общие типы и правила витрины: каталог, корзина, избранное, отзывы,
//! фильтрация карточек товара. Не зависит от DOM, поэтому тестируется нативно.

pub mod domain;
pub mod enums;
pub mod filtering;
pub mod shared;
