//! The sample dataset: five countries and ten persons.
//!
//! Ids are fixed so seeded references stay stable across runs. Every sample
//! person's `country_id` resolves against [`sample_countries`], which the
//! tests assert.

use chrono::NaiveDate;
use uuid::{uuid, Uuid};

use roster_core::{
  country::Country,
  person::{Gender, Person},
};

/// Country ids referenced by [`sample_persons`].
pub const USA: Uuid = uuid!("334a5068-a3f6-4e3a-bfcc-6c34a389e9ce");
pub const CANADA: Uuid = uuid!("9201eb38-3d7e-439e-a879-7a5ce598a084");
pub const UK: Uuid = uuid!("a31f0e7e-e4f6-4594-86b7-b415f6fc2983");
pub const INDIA: Uuid = uuid!("92142b42-121b-467e-900e-1397e0f1f689");
pub const AUSTRALIA: Uuid = uuid!("cb898f97-4a05-4487-ad12-5e46ea17d625");

/// The five sample countries, in their canonical order.
pub fn sample_countries() -> Vec<Country> {
  [
    (USA, "USA"),
    (CANADA, "Canada"),
    (UK, "UK"),
    (INDIA, "India"),
    (AUSTRALIA, "Australia"),
  ]
  .into_iter()
  .map(|(country_id, name)| Country {
    country_id,
    country_name: name.to_string(),
  })
  .collect()
}

/// The ten sample persons, in their canonical order.
#[rustfmt::skip]
pub fn sample_persons() -> Vec<Person> {
  vec![
    person(
      uuid!("0f490d8b-c2c4-4152-af84-111860e627fd"),
      "Ara", "adampney0@redcross.org", date(1996, 4, 11), Gender::Male,
      "42 Summit Parkway", false, USA,
    ),
    person(
      uuid!("377ae0d7-2b43-4d85-b183-46e18cf886d4"),
      "Ellen", "etorel1@yale.edu", date(1992, 11, 5), Gender::Female,
      "90147 Southridge Alley", true, CANADA,
    ),
    person(
      uuid!("27bb1d2c-bdfe-4a8c-b8bb-933a228e6716"),
      "Pavia", "pbillington2@ow.ly", date(1996, 10, 24), Gender::Female,
      "8 Comanche Hill", false, CANADA,
    ),
    person(
      uuid!("c983bac9-eaed-49cb-94bb-6228726b8dea"),
      "Gale", "grostern3@linkedin.com", date(2000, 6, 12), Gender::Male,
      "6543 Vidon Parkway", true, UK,
    ),
    person(
      uuid!("f083ecb7-6b86-4806-a63b-ca2c9f8a4b48"),
      "Lissi", "lcoldman4@google.cn", date(1996, 10, 10), Gender::Female,
      "64 Hauk Drive", false, UK,
    ),
    person(
      uuid!("b8741297-817e-485b-8ff3-0006ca98530a"),
      "Katharine", "kgoding5@ucoz.com", date(1999, 7, 8), Gender::Female,
      "04521 Mockingbird Trail", true, INDIA,
    ),
    person(
      uuid!("38419ce7-a18e-48c7-bc27-a1569f60d568"),
      "Carlo", "cgoldring6@google.co.uk", date(1996, 10, 15), Gender::Male,
      "5 Dorton Avenue", true, AUSTRALIA,
    ),
    person(
      uuid!("ee1dc581-6157-4d69-9fc6-3efa5349172d"),
      "Nerti", "ncazalet7@irs.gov", date(1993, 5, 21), Gender::Female,
      "7 Brickson Park Avenue", false, AUSTRALIA,
    ),
    person(
      uuid!("27871780-d2d5-4a8f-87bb-6f82e47a46ed"),
      "Cassondra", "cbotler8@php.net", date(1991, 12, 5), Gender::Female,
      "835 Buhler Road", false, AUSTRALIA,
    ),
    person(
      uuid!("f51e84a7-c24b-4fb7-b883-3f7a11e6a6c8"),
      "Nikola", "nwelman9@homestead.com", date(1999, 9, 27), Gender::Male,
      "96755 Spaight Lane", true, AUSTRALIA,
    ),
  ]
}

#[allow(clippy::too_many_arguments)]
fn person(
  person_id: Uuid,
  person_name: &str,
  email: &str,
  date_of_birth: NaiveDate,
  gender: Gender,
  address: &str,
  receive_newsletters: bool,
  country_id: Uuid,
) -> Person {
  Person {
    person_id,
    person_name: Some(person_name.to_string()),
    email: Some(email.to_string()),
    date_of_birth: Some(date_of_birth),
    gender: Some(gender),
    country_id: Some(country_id),
    address: Some(address.to_string()),
    receive_newsletters,
  }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}
